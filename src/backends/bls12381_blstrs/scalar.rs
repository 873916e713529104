use crate::backends::error::ScalarError;
use crate::curves::bls12381;
use crate::traits::ScalarField;

use std::ops::Add;
use std::ops::Mul;

use group::ff::Field;
use rand_chacha::rand_core::SeedableRng;
use rand_chacha::ChaChaRng;

#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct Scalar(pub(super) blstrs::Scalar);

// Secret scalars are wiped through `Secret`, zero is the default value.
impl zeroize::DefaultIsZeroes for Scalar {}

impl ScalarField for Scalar {
    const SCALAR_SIZE: usize = bls12381::SCALAR_SIZE;

    fn zero() -> Self {
        Self(blstrs::Scalar::ZERO)
    }

    fn random() -> Self {
        let mut rng = ChaChaRng::from_entropy();
        Self(blstrs::Scalar::random(&mut rng))
    }

    fn from_be_bytes_mod_order(bytes: &[u8]) -> Self {
        let mut sk = blst_lib::blst_scalar::default();

        unsafe {
            let _ = blst_lib::blst_scalar_from_be_bytes(&mut sk, bytes.as_ptr(), bytes.len());
        }

        match blstrs::Scalar::from_bytes_le(&sk.b).into_option() {
            Some(sk) => Self(sk),
            None => Self(blstrs::Scalar::ONE),
        }
    }

    fn to_bytes_be(&self) -> Vec<u8> {
        self.0.to_bytes_be().to_vec()
    }

    fn from_bytes_be(bytes: &[u8]) -> Result<Self, ScalarError> {
        let bytes: [u8; bls12381::SCALAR_SIZE] =
            bytes
                .try_into()
                .map_err(|_| ScalarError::InvalidInputLenght {
                    expected: bls12381::SCALAR_SIZE,
                    received: bytes.len(),
                })?;

        let scalar = blstrs::Scalar::from_bytes_be(&bytes)
            .into_option()
            .ok_or(ScalarError::NonCanonicalInput)?;

        Ok(Self(scalar))
    }
}

impl Mul<&Scalar> for Scalar {
    type Output = Scalar;

    #[inline]
    fn mul(self, rhs: &Scalar) -> Scalar {
        Scalar(self.0 * rhs.0)
    }
}

impl Add<&Scalar> for Scalar {
    type Output = Scalar;

    #[inline]
    fn add(self, rhs: &Scalar) -> Scalar {
        Scalar(self.0 + rhs.0)
    }
}
