//! Walks small x-coordinates and recovers points on both curves, first anywhere on the curve and
//! then cleared into the prime order subgroup.

use tate::{
    g1_curve_point_at_x, g1_subgroup_point_at_x, g2_curve_point_at_x, g2_subgroup_point_at_x, Fp,
    GroupTrait,
};
use tracing::{info, warn};

fn main() {
    tracing_subscriber::fmt().init();
    for n in 0..16u64 {
        let x = Fp::from(n);
        match g1_curve_point_at_x(x) {
            Ok(p) => {
                let in_subgroup = bool::from(p.is_torsion_free());
                let cleared = g1_subgroup_point_at_x(x).map(|q| bool::from(q.is_torsion_free()));
                info!(x = n, in_subgroup, ?cleared, "G1 point");
            }
            Err(e) => warn!(x = n, "no G1 point: {}", e),
        }
        match g2_curve_point_at_x(x) {
            Ok(p) => {
                let in_subgroup = bool::from(p.is_torsion_free());
                let cleared = g2_subgroup_point_at_x(x).map(|q| bool::from(q.is_torsion_free()));
                info!(x = n, in_subgroup, ?cleared, "G2 point");
            }
            Err(e) => warn!(x = n, "no G2 point: {}", e),
        }
    }
}
