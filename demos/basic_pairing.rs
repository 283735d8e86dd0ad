use tate::{reduced_pairing, G1Projective, G2Projective, GroupTrait};
use tracing::info;

const RANGE: usize = 10;

fn main() {
    tracing_subscriber::fmt().init();
    let a = G1Projective::generator();
    let b = G2Projective::generator();

    let e = reduced_pairing(&a, &b);
    for _ in 0..RANGE {
        assert_eq!(reduced_pairing(&a, &b), e, "the pairing is not deterministic");
    }
    info!(identity = e.is_identity(), "e(G1, G2) computed {} times", RANGE + 1);
}
