use crate::backends::error::PointError;
use crate::backends::error::ScalarError;
use crate::traits::Affine;
use crate::traits::Group;
use crate::traits::Projective;
use crate::traits::ScalarField;
use crate::traits::Scheme;

// Vanilla Schnorr signature scheme
// ref: https://github.com/drand/kyber/blob/master/sign/schnorr

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum SchnorrError {
    #[error("invalid input lenght: expected {expected}, received {received}")]
    InvalidInputLenght { expected: usize, received: usize },
    #[error("{0}")]
    Point(#[from] PointError),
    #[error("{0}")]
    Scalar(#[from] ScalarError),
    #[error("verification is failed")]
    FailedVerification,
}

pub fn signature_size<S: Scheme>() -> usize {
    <S::Key as Group>::POINT_SIZE + S::Scalar::SCALAR_SIZE
}

pub fn sign<S: Scheme>(private: &S::Scalar, msg: &[u8]) -> Result<Vec<u8>, SchnorrError> {
    // create random secret k and public point commitment r
    let k = S::Scalar::random();
    let mut r_bytes = S::sk_to_pk(&k).serialize()?;

    // create hash(public || r || message)
    let public_bytes = S::sk_to_pk(private).serialize()?;
    let h = S::Scalar::set_bytes(&public_bytes, &r_bytes, msg);

    // compute response s = k + x*h
    let xh = h * private;
    let s = k + &xh;

    //  return r || s
    r_bytes.extend_from_slice(&s.to_bytes_be());

    Ok(r_bytes)
}

pub fn verify<S: Scheme>(
    public: &<S::Key as Group>::Affine,
    msg: &[u8],
    sig: &[u8],
) -> Result<(), SchnorrError> {
    let expected = signature_size::<S>();

    if sig.len() != expected {
        return Err(SchnorrError::InvalidInputLenght {
            expected,
            received: sig.len(),
        });
    }
    let (r_bytes, s_bytes) = sig.split_at(<S::Key as Group>::POINT_SIZE);
    let r = <S::Key as Group>::Projective::deserialize(r_bytes)?;
    let s = S::Scalar::from_bytes_be(s_bytes)?;

    // recompute hash(public || r || msg)
    let public_bytes = public.serialize()?;
    let h = S::Scalar::set_bytes(&public_bytes, r_bytes, msg);

    // compute s = g^s
    let s = <S::Key as Group>::Affine::generator() * s;

    // compute r + a^h
    let mut ah = h * public;
    ah += &r;

    if s != ah {
        return Err(SchnorrError::FailedVerification);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schemes::DefaultScheme;
    use crate::schemes::ShortKeyScheme;

    fn schnorr_sign_verify<S: Scheme>() {
        let private = S::Scalar::random();
        let public = S::sk_to_pk(&private);
        let msg = S::Scalar::random().to_bytes_be();
        let sig = sign::<S>(&private, &msg).unwrap();
        assert_eq!(sig.len(), signature_size::<S>());
        assert!(verify::<S>(&public, &msg, &sig).is_ok())
    }

    fn schnorr_wrong_key<S: Scheme>() {
        let private = S::Scalar::random();
        let other = S::sk_to_pk(&S::Scalar::random());
        let sig = sign::<S>(&private, b"message").unwrap();
        assert_eq!(
            verify::<S>(&other, b"message", &sig),
            Err(SchnorrError::FailedVerification)
        )
    }

    fn schnorr_short_input<S: Scheme>() {
        let public = S::sk_to_pk(&S::Scalar::random());
        let err = verify::<S>(&public, b"message", &[1, 2, 3]).unwrap_err();
        assert_eq!(
            err,
            SchnorrError::InvalidInputLenght {
                expected: signature_size::<S>(),
                received: 3
            }
        )
    }

    #[test]
    fn test_schnorr_sign_verify() {
        for _ in 0..5 {
            schnorr_sign_verify::<DefaultScheme>();
            schnorr_sign_verify::<ShortKeyScheme>();
        }
    }

    #[test]
    fn test_schnorr_failures() {
        schnorr_wrong_key::<DefaultScheme>();
        schnorr_wrong_key::<ShortKeyScheme>();
        schnorr_short_input::<DefaultScheme>();
        schnorr_short_input::<ShortKeyScheme>();
    }
}
