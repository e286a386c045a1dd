//! Named element access (`v.x`, `v.y`, `v.z`, `v.w`) for vectors with up to 4 elements.

use std::ops::{Deref, DerefMut};

use crate::Vector;

macro_rules! views {
    ($($n:literal => $View:ident { $($field:ident),+ }),+ $(,)?) => {
        $(
            #[doc = concat!("Named fields of a ", stringify!($n), "-element [`Vector`].")]
            #[repr(C)]
            pub struct $View<T> {
                $(
                    #[doc = concat!("The `", stringify!($field), "` element.")]
                    pub $field: T,
                )+
                _priv: (), // prevent external construction
            }

            impl<T> Deref for Vector<T, $n> {
                type Target = $View<T>;

                #[inline]
                fn deref(&self) -> &Self::Target {
                    // SAFETY: `Vector<T, N>` is a transparent `[T; N]` and the view is a `repr(C)`
                    // struct of `N` fields of type `T` followed by a ZST, so both have the same size,
                    // alignment and element offsets.
                    unsafe { &*(self as *const Self).cast::<$View<T>>() }
                }
            }

            impl<T> DerefMut for Vector<T, $n> {
                #[inline]
                fn deref_mut(&mut self) -> &mut Self::Target {
                    // SAFETY: see `Deref` above.
                    unsafe { &mut *(self as *mut Self).cast::<$View<T>>() }
                }
            }
        )+
    };
}

views! {
    1 => X { x },
    2 => XY { x, y },
    3 => XYZ { x, y, z },
    4 => XYZW { x, y, z, w },
}
