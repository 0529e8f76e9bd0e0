pub(crate) mod filmstrip;
pub(crate) mod timeline;
