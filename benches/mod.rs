use criterion::{criterion_group, criterion_main};

use group::g1::*;
use group::g2::*;
use group::gt::*;

use field::fp::*;
use field::fp3::*;
use field::fp6::*;

use pairing::*;

criterion_group!(
    pairing_benches,
    test_precompute_g2,
    test_miller_loop,
    test_final_exponentiation,
    test_pairing
);

criterion_group!(
    g1_benches,
    test_g1affine_conversion_to_g1projective,
    test_g1projective_addition,
    test_g1projective_multiplication,
    test_g1projective_conversion_to_g1affine,
    test_g1_decompression
);
criterion_group!(
    g2_benches,
    test_g2affine_conversion_to_g2projective,
    test_g2projective_addition,
    test_g2projective_multiplication,
    test_g2_subgroup_check
);
criterion_group!(gt_benches, test_gt_multiplication);

criterion_group!(
    fp_benches,
    test_fp_multiplication,
    test_fp_addition,
    test_fp_division,
    test_fp_sqrt,
    test_fp_random,
    test_fp_new
);
criterion_group!(
    fp3_benches,
    test_fp3_multiplication,
    test_fp3_square,
    test_fp3_division,
    test_fp3_random
);
criterion_group!(
    fp6_benches,
    test_fp6_multiplication,
    test_fp6_square,
    test_fp6_mul_by_014,
    test_fp6_division,
    test_fp6_frobenius,
    test_fp6_random
);

criterion_main!(
    g1_benches,
    g2_benches,
    gt_benches,
    fp_benches,
    fp3_benches,
    fp6_benches,
    pairing_benches
);
