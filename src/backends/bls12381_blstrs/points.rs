use super::scalar::Scalar;
use crate::backends::error::PointError;
use crate::curves::bls12381;
use crate::traits::Affine;
use crate::traits::Projective;

use core::fmt;
use group::prime::PrimeCurveAffine as _;
use std::ops::AddAssign;
use std::ops::Mul;

/// Wraps a blstrs affine/projective pair into the crate point traits.
/// Both groups share the compressed encoding, only the width differs.
macro_rules! impl_point {
    ($affine:ident, $projective:ident, $inner_affine:ty, $inner_projective:ty, $size:expr) => {
        #[derive(Debug, Clone, Default)]
        pub struct $affine(pub(super) $inner_affine);

        #[derive(Debug, Clone)]
        pub struct $projective(pub(super) $inner_projective);

        impl Affine for $affine {
            fn generator() -> Self {
                Self(<$inner_affine>::generator())
            }

            fn identity() -> Self {
                Self(<$inner_affine>::identity())
            }

            fn is_identity(&self) -> bool {
                self.0.is_identity().into()
            }

            fn serialize(&self) -> Result<Vec<u8>, PointError> {
                Ok(self.0.to_compressed().to_vec())
            }

            fn deserialize(bytes: &[u8]) -> Result<Self, PointError> {
                let bytes: [u8; $size] =
                    bytes
                        .try_into()
                        .map_err(|_| PointError::InvalidInputLenght {
                            expected: $size,
                            received: bytes.len(),
                        })?;

                let point = <$inner_affine>::from_compressed(&bytes)
                    .into_option()
                    .ok_or(PointError::NonCanonicalInput)?;

                Ok(Self(point))
            }
        }

        impl Projective for $projective {
            fn deserialize(bytes: &[u8]) -> Result<Self, PointError> {
                let bytes: [u8; $size] =
                    bytes
                        .try_into()
                        .map_err(|_| PointError::InvalidInputLenght {
                            expected: $size,
                            received: bytes.len(),
                        })?;

                let point = <$inner_projective>::from_compressed(&bytes)
                    .into_option()
                    .ok_or(PointError::NonCanonicalInput)?;

                Ok(Self(point))
            }
        }

        impl Mul<&Scalar> for $affine {
            type Output = $projective;

            fn mul(self, rhs: &Scalar) -> Self::Output {
                $projective(self.0 * rhs.0)
            }
        }

        impl Mul<Scalar> for $affine {
            type Output = $projective;

            fn mul(self, rhs: Scalar) -> Self::Output {
                $projective(self.0 * rhs.0)
            }
        }

        impl Mul<&$affine> for Scalar {
            type Output = $projective;

            fn mul(self, rhs: &$affine) -> Self::Output {
                $projective(rhs.0 * self.0)
            }
        }

        impl AddAssign<&$projective> for $projective {
            #[inline]
            fn add_assign(&mut self, rhs: &$projective) {
                self.0 += rhs.0;
            }
        }

        impl From<$projective> for $affine {
            fn from(p: $projective) -> $affine {
                $affine(<$inner_affine>::from(p.0))
            }
        }

        impl From<$affine> for $projective {
            fn from(p: $affine) -> $projective {
                $projective(<$inner_projective>::from(p.0))
            }
        }

        impl From<&$affine> for $projective {
            fn from(p: &$affine) -> $projective {
                $projective(<$inner_projective>::from(p.0))
            }
        }

        impl PartialEq for $affine {
            #[inline]
            fn eq(&self, other: &Self) -> bool {
                self.0.eq(&other.0)
            }
        }

        impl PartialEq for $projective {
            #[inline]
            fn eq(&self, other: &Self) -> bool {
                self.0.eq(&other.0)
            }
        }

        impl fmt::Display for $affine {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "{}", &hex::encode(self.0.to_compressed()))
            }
        }
    };
}

impl_point!(
    G1Affine,
    G1Projective,
    blstrs::G1Affine,
    blstrs::G1Projective,
    bls12381::POINT_SIZE_G1
);

impl_point!(
    G2Affine,
    G2Projective,
    blstrs::G2Affine,
    blstrs::G2Projective,
    bls12381::POINT_SIZE_G2
);
