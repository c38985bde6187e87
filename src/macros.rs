//! Utility macros.

/// Implements a binary operator for all four combinations of owned and
/// borrowed operands. The generic parameters of the impl are given in
/// brackets.
macro_rules! impl_binop {
    ($op:ident, $method:ident, [$($gen:tt)*], $tl:ty, $tr:ty, $to:ty, |$lhs:ident, $rhs:ident| $body:block) => {
        impl<'a, $($gen)*> ::std::ops::$op<&'a $tr> for &'a $tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: &'a $tr) -> Self::Output {
                let $lhs = self;
                let $rhs = rhs;
                $body
            }
        }

        impl<$($gen)*> ::std::ops::$op<$tr> for &$tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: $tr) -> Self::Output {
                self.$method(&rhs)
            }
        }

        impl<'a, $($gen)*> ::std::ops::$op<&'a $tr> for $tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: &'a $tr) -> Self::Output {
                (&self).$method(rhs)
            }
        }

        impl<$($gen)*> ::std::ops::$op<$tr> for $tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: $tr) -> Self::Output {
                (&self).$method(&rhs)
            }
        }
    };
}

macro_rules! impl_unary_op {
    ($op:ident, $method:ident, [$($gen:tt)*], $t:ty, $to:ty, |$this:ident| $body:block) => {
        impl<$($gen)*> ::std::ops::$op for &$t {
            type Output = $to;

            #[inline]
            fn $method(self) -> Self::Output {
                let $this = self;
                $body
            }
        }

        impl<$($gen)*> ::std::ops::$op for $t {
            type Output = $to;

            #[inline]
            fn $method(self) -> Self::Output {
                (&self).$method()
            }
        }
    };
}

/// Generates a method for every ordered selection of two, three and four of
/// the given components, with repetition. Each method is named after its
/// selection (`xy`, `zyx`, `wwxy`, ...) and returns the vector of the
/// corresponding arity. Must be invoked inside an `impl<T: Scalar>` block.
macro_rules! impl_swizzles {
    ($($comp:ident),+) => {
        impl_swizzles!(@pairs [$($comp),+] [$($comp),+]);
        impl_swizzles!(@triples [$($comp),+] [$($comp),+]);
        impl_swizzles!(@quads [$($comp),+] [$($comp),+]);
    };
    (@pairs [$($a:ident),+] $all:tt) => {
        $(impl_swizzles!(@pair $a $all);)+
    };
    (@pair $a:ident [$($b:ident),+]) => {
        ::paste::paste! {
            $(
                #[inline]
                pub const fn [<$a $b>](&self) -> $crate::vector::Vector2<T> {
                    $crate::vector::Vector2::new(self.$a, self.$b)
                }
            )+
        }
    };
    (@triples [$($a:ident),+] $all:tt) => {
        $(impl_swizzles!(@triples_of $a $all $all);)+
    };
    (@triples_of $a:ident [$($b:ident),+] $all:tt) => {
        $(impl_swizzles!(@triple $a $b $all);)+
    };
    (@triple $a:ident $b:ident [$($c:ident),+]) => {
        ::paste::paste! {
            $(
                #[inline]
                pub const fn [<$a $b $c>](&self) -> $crate::vector::Vector3<T> {
                    $crate::vector::Vector3::new(self.$a, self.$b, self.$c)
                }
            )+
        }
    };
    (@quads [$($a:ident),+] $all:tt) => {
        $(impl_swizzles!(@quads_of $a $all $all);)+
    };
    (@quads_of $a:ident [$($b:ident),+] $all:tt) => {
        $(impl_swizzles!(@quads_of_pair $a $b $all $all);)+
    };
    (@quads_of_pair $a:ident $b:ident [$($c:ident),+] $all:tt) => {
        $(impl_swizzles!(@quad $a $b $c $all);)+
    };
    (@quad $a:ident $b:ident $c:ident [$($d:ident),+]) => {
        ::paste::paste! {
            $(
                #[inline]
                pub const fn [<$a $b $c $d>](&self) -> $crate::vector::Vector4<T> {
                    $crate::vector::Vector4::new(self.$a, self.$b, self.$c, self.$d)
                }
            )+
        }
    };
}
