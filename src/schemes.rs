use crate::curves::bls12381::G1;
use crate::curves::bls12381::G2;
use crate::traits::Group;
use crate::traits::Scheme;

pub const DEFAULT_SCHEME: &str = "bls12381-schnorr-g1";
pub const SHORT_KEY_SCHEME: &str = "bls12381-schnorr-g2";

type Scalar = <G1 as Group>::Scalar;

/// Identity keys and endorsements on G1, group public key on G2.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct DefaultScheme;

impl Scheme for DefaultScheme {
    const ID: &'static str = DEFAULT_SCHEME;
    type Key = G1;
    type GroupKey = G2;
    type Scalar = Scalar;
}

/// Identity keys and endorsements on G2, group public key on G1.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct ShortKeyScheme;

impl Scheme for ShortKeyScheme {
    const ID: &'static str = SHORT_KEY_SCHEME;
    type Key = G2;
    type GroupKey = G1;
    type Scalar = Scalar;
}
