#[macro_export]
macro_rules! row {
    ($($x:expr),* $(,)*) => {{
        let vals: ::std::vec::Vec<$crate::Scalar> = vec![$($crate::Scalar::from($x),)*];
        $crate::Row::from(vals)
    }};
}

/// Builds a [`Matrix`](crate::Matrix) from nested literals. Rows may mix
/// scalar kinds; the result is an `LResult` because rows can be ragged.
#[macro_export]
macro_rules! matrix {
    () => {
        $crate::Matrix::new(::std::vec::Vec::<$crate::Row>::new())
    };
    ($([$($x:expr),* $(,)*]),+ $(,)*) => {{
        $crate::Matrix::new(vec![$($crate::row![$($x),*],)+])
    }};
}

// `lhs op rhs` for every owned/borrowed combination, delegating to `$imp`.
macro_rules! impl_binary_op {
    ($ty:ident, $trt:ident, $mth:ident, $imp:ident) => {
        impl std::ops::$trt<&$ty> for &$ty {
            type Output = $crate::LResult<$ty>;

            fn $mth(self, rhs: &$ty) -> Self::Output {
                self.$imp(rhs)
            }
        }

        impl std::ops::$trt<$ty> for &$ty {
            type Output = $crate::LResult<$ty>;

            fn $mth(self, rhs: $ty) -> Self::Output {
                self.$imp(&rhs)
            }
        }

        impl std::ops::$trt<&$ty> for $ty {
            type Output = $crate::LResult<$ty>;

            fn $mth(self, rhs: &$ty) -> Self::Output {
                self.$imp(rhs)
            }
        }

        impl std::ops::$trt<$ty> for $ty {
            type Output = $crate::LResult<$ty>;

            fn $mth(self, rhs: $ty) -> Self::Output {
                self.$imp(&rhs)
            }
        }
    };
}

// `container op scalar`, applied to every element.
macro_rules! impl_scalar_op {
    ($ty:ident, $trt:ident, $mth:ident, $imp:ident) => {
        impl<S: Into<$crate::Scalar>> std::ops::$trt<S> for &$ty {
            type Output = $crate::LResult<$ty>;

            fn $mth(self, rhs: S) -> Self::Output {
                self.$imp(rhs)
            }
        }

        impl<S: Into<$crate::Scalar>> std::ops::$trt<S> for $ty {
            type Output = $crate::LResult<$ty>;

            fn $mth(self, rhs: S) -> Self::Output {
                self.$imp(rhs)
            }
        }
    };
}

// `scalar / container` keeps the scalar as the divisor: it divides every
// element by the scalar, exactly like `container / scalar`.
macro_rules! impl_reflected_div {
    ($ty:ident; $($s:ty),*) => {
        $(
            impl std::ops::Div<&$ty> for $s {
                type Output = $crate::LResult<$ty>;

                fn div(self, rhs: &$ty) -> Self::Output {
                    rhs.true_div(self)
                }
            }

            impl std::ops::Div<$ty> for $s {
                type Output = $crate::LResult<$ty>;

                fn div(self, rhs: $ty) -> Self::Output {
                    rhs.true_div(self)
                }
            }
        )*
    };
}

macro_rules! impl_neg {
    ($ty:ident) => {
        impl std::ops::Neg for &$ty {
            type Output = $crate::LResult<$ty>;

            fn neg(self) -> Self::Output {
                self.try_neg()
            }
        }

        impl std::ops::Neg for $ty {
            type Output = $crate::LResult<$ty>;

            fn neg(self) -> Self::Output {
                self.try_neg()
            }
        }
    };
}
