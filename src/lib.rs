mod backends;
pub mod curves;
pub mod schemes;
pub mod schnorr;
pub mod secret;
pub mod signing;
pub mod traits;

pub mod points {
    use crate::traits::Group;
    use crate::traits::Scheme;

    /// Identity key point in affine representation
    pub type KeyPoint<S> = <<S as Scheme>::Key as Group>::Affine;

    /// Group public key point in affine representation
    pub type GroupPoint<S> = <<S as Scheme>::GroupKey as Group>::Affine;
}
