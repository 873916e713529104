pub mod error;

mod bls12381_blstrs {
    mod points;
    mod scalar;

    use crate::curves::bls12381;
    super::impl_groups!(bls12381);
}

macro_rules! impl_groups {
    ($curve:ident) => {
        use crate::traits::Group;

        impl Group for $curve::G1 {
            const POINT_SIZE: usize = $curve::POINT_SIZE_G1;

            type Affine = points::G1Affine;
            type Projective = points::G1Projective;
            type Scalar = scalar::Scalar;
        }

        impl Group for $curve::G2 {
            const POINT_SIZE: usize = $curve::POINT_SIZE_G2;

            type Affine = points::G2Affine;
            type Projective = points::G2Projective;
            type Scalar = scalar::Scalar;
        }
    };
}

pub(in crate::backends) use impl_groups;
