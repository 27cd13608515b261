/// A struct used to control whether a trait needs to be implemented.
#[derive(Debug)]
pub(crate) struct TraitImplSwitches {
    /// Default is `true`, use `#[reflect(TypePath = false)]` to disable it.
    /// Then Users can(must) impl it in a more customized way.
    pub(crate) impl_type_path: bool,
    /// Default is `true`, use `#[reflect(Typed = false)]` to disable it.
    /// Then Users can(must) impl it in a more customized way.
    pub(crate) impl_typed: bool,
    /// Default is `true`, use `#[reflect(Reflect = false)]` to disable it.
    /// Then Users can(must) impl it in a more customized way.
    pub(crate) impl_reflect: bool,
    /// Default is `true`, use `#[reflect(Struct = false)]` to disable it.
    /// Then Users can(must) impl it in a more customized way.
    pub(crate) impl_struct: bool,
}

impl Default for TraitImplSwitches {
    #[inline]
    fn default() -> Self {
        Self {
            impl_type_path: true,
            impl_typed: true,
            impl_reflect: true,
            impl_struct: true,
        }
    }
}
