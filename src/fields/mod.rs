pub mod extensions;

pub mod fp;
pub mod fr;

// the tower is F_q -> F_{q^3} -> F_{q^6}, with no quadratic level in between
pub mod fp3;
pub mod fp6;
