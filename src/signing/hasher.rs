use super::error::ResultError;
use super::structs::DkgResult;
use super::structs::DkgResultHash;
use super::structs::ParticipantIndex;
use crate::traits::Affine;
use crate::traits::Scheme;

use sha3::Digest;
use sha3::Keccak256;

/// ResultHasher produces the canonical digest every participant signs.
/// Implementations must be deterministic across participants and must not
/// cover the private key share.
pub trait ResultHasher<S: Scheme> {
    fn hash(&self, result: &DkgResult<S>) -> Result<DkgResultHash, ResultError>;
}

/// Keccak-256 over a length-prefixed encoding of the public outcome:
///
/// `key_flag || key || len(disqualified) || disqualified || len(inactive) || inactive`
///
/// with indices and lengths as big-endian `u32`. List order is preserved.
#[derive(Debug, Clone, Copy, Default)]
pub struct Keccak256Hasher;

impl<S: Scheme> ResultHasher<S> for Keccak256Hasher {
    fn hash(&self, result: &DkgResult<S>) -> Result<DkgResultHash, ResultError> {
        let mut h = Keccak256::new();

        match result.group_public_key() {
            Some(key) => {
                let key_bytes = key.serialize().map_err(ResultError::EncodeGroupKey)?;
                h.update([1u8]);
                h.update(key_bytes);
            }
            None => h.update([0u8]),
        }
        update_members(&mut h, result.disqualified());
        update_members(&mut h, result.inactive());

        Ok(DkgResultHash::new(h.finalize().into()))
    }
}

fn update_members(h: &mut Keccak256, members: &[ParticipantIndex]) {
    h.update((members.len() as u32).to_be_bytes());
    for idx in members {
        h.update(idx.to_be_bytes());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::points::GroupPoint;
    use crate::schemes::DefaultScheme;
    use crate::schemes::ShortKeyScheme;
    use crate::secret::Secret;
    use crate::traits::Group;
    use crate::traits::ScalarField;

    fn hash<S: Scheme>(r: &DkgResult<S>) -> DkgResultHash {
        Keccak256Hasher.hash(r).unwrap()
    }

    fn hash_follows_equality<S: Scheme>() {
        let key: GroupPoint<S> =
            (<S::GroupKey as Group>::Affine::generator() * S::Scalar::random()).into();
        let result = |d: Vec<u32>, i: Vec<u32>| {
            DkgResult::<S>::new(Some(key.clone()), d, i)
                .unwrap()
                .with_private_share(Secret::new(S::Scalar::random()))
        };

        // shares differ, outcome doesn't
        assert_eq!(hash(&result(vec![2], vec![4])), hash(&result(vec![2], vec![4])));

        assert_ne!(hash(&result(vec![2, 3], vec![])), hash(&result(vec![3, 2], vec![])));
        // members can't slide between lists
        assert_ne!(hash(&result(vec![2], vec![])), hash(&result(vec![], vec![2])));
        assert_ne!(
            hash(&result(vec![], vec![])),
            hash(&DkgResult::<S>::new(None, vec![], vec![]).unwrap())
        );
    }

    #[test]
    fn test_hash_follows_equality() {
        hash_follows_equality::<DefaultScheme>();
        hash_follows_equality::<ShortKeyScheme>();
    }

    #[test]
    fn test_empty_result_vector() {
        // keccak256(0x00 || 0x00000000 || 0x00000000)
        let mut h = Keccak256::new();
        h.update([0u8; 9]);
        let expected: [u8; 32] = h.finalize().into();

        let empty = DkgResult::<DefaultScheme>::new(None, vec![], vec![]).unwrap();
        assert_eq!(hash(&empty).as_bytes(), &expected);
    }
}
