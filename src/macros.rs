//! Helper macros.

/// Implements [`Vertex`] for a `#[repr(C)]` plain-old-data struct.
///
/// Each listed field becomes one vertex attribute, numbered in the order
/// given. The format names come from [`buffer::Format`].
///
/// ```rust
/// # #[macro_use] extern crate orion;
/// #[repr(C)]
/// #[derive(Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
/// struct Vertex {
///     position: [f32; 3],
///     color: [u8; 4],
/// }
///
/// impl_vertex!(Vertex {
///     position: F32(3),
///     color: U8Norm(4),
/// });
///
/// # fn main() {
/// use orion::mesh::Vertex as _;
/// assert_eq!(12, Vertex::attributes()[1].offset);
/// # }
/// ```
///
/// [`Vertex`]: mesh/trait.Vertex.html
/// [`buffer::Format`]: buffer/format/enum.Format.html
#[macro_export]
macro_rules! impl_vertex {
    ($ty:ty { $($field:ident: $format:expr),+ $(,)? }) => {
        impl $crate::mesh::Vertex for $ty {
            fn attributes() -> &'static [$crate::mesh::Attribute] {
                #[allow(unused_imports)]
                use $crate::buffer::Format::*;
                const ATTRIBUTES: &[$crate::mesh::Attribute] = &[
                    $(
                        $crate::mesh::Attribute {
                            format: $format,
                            offset: ::std::mem::offset_of!($ty, $field),
                        },
                    )+
                ];
                ATTRIBUTES
            }
        }
    };
}
