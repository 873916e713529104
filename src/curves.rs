pub mod bls12381 {
    pub const POINT_SIZE_G1: usize = 48;
    pub const POINT_SIZE_G2: usize = 96;
    pub const SCALAR_SIZE: usize = 32;

    pub struct G1;
    pub struct G2;
}
