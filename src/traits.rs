use crate::backends::error::PointError;
use crate::backends::error::ScalarError;

use std::fmt::Debug;
use std::fmt::Display;
use std::ops::Add;
use std::ops::AddAssign;
use std::ops::Mul;

use sha2::digest::Digest;
use zeroize::Zeroize;

pub trait Group: Sized {
    const POINT_SIZE: usize;

    type Affine: Affine
        + Clone
        + From<Self::Projective>
        + Into<Self::Projective>
        + PartialEq
        + for<'a> Mul<&'a Self::Scalar, Output = Self::Projective>
        + Mul<Self::Scalar, Output = Self::Projective>;

    type Projective: Projective
        + Clone
        + From<Self::Affine>
        + Into<Self::Affine>
        + for<'a> From<&'a Self::Affine>
        + for<'a> AddAssign<&'a Self::Projective>;

    type Scalar: ScalarField + for<'a> Mul<&'a Self::Affine, Output = Self::Projective>;
}

/// Scalars double as long-term secrets, so they must be wipeable and
/// deliberately carry no `Display`.
pub trait ScalarField:
    Default
    + Sync
    + Send
    + Sized
    + Debug
    + PartialEq
    + Copy
    + Zeroize
    + for<'a> Mul<&'a Self, Output = Self>
    + for<'a> Add<&'a Self, Output = Self>
{
    const SCALAR_SIZE: usize;

    fn zero() -> Self;
    fn random() -> Self;
    fn to_bytes_be(&self) -> Vec<u8>;
    fn from_bytes_be(bytes: &[u8]) -> Result<Self, ScalarError>;
    fn from_be_bytes_mod_order(bytes: &[u8]) -> Self;
    fn set_bytes(public: &[u8], r: &[u8], msg: &[u8]) -> Self {
        let mut h = sha2::Sha512::new();
        h.update(r);
        h.update(public);
        h.update(msg);

        Self::from_be_bytes_mod_order(h.finalize().as_slice())
    }
}

pub trait Affine: Default + Sync + Send + Sized + PartialEq + Debug + Display {
    fn generator() -> Self;
    fn identity() -> Self;
    fn is_identity(&self) -> bool;
    /// Canonical compressed encoding.
    fn serialize(&self) -> Result<Vec<u8>, PointError>;
    fn deserialize(bytes: &[u8]) -> Result<Self, PointError>;
}

pub trait Projective: Sized + Sync + Send + Debug + PartialEq {
    fn deserialize(bytes: &[u8]) -> Result<Self, PointError>;
}

/// Scheme binds the group used for participant identities (`Key`) to the
/// group holding the DKG group public key (`GroupKey`).
pub trait Scheme: 'static + Sized + Send + Sync {
    const ID: &'static str;

    type Key: Group<Scalar = Self::Scalar>;

    type GroupKey: Group<Scalar = Self::Scalar>;

    type Scalar: ScalarField
        + for<'a> Mul<&'a <Self::Key as Group>::Affine, Output = <Self::Key as Group>::Projective>;

    fn sk_to_pk(sk: &Self::Scalar) -> <Self::Key as Group>::Affine {
        (<Self::Key as Group>::Affine::generator() * sk).into()
    }
}
