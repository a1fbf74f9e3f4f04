//! Database access imports for the endpoints module.

use crate::{Fragment, IdiomSet};

/// `get_db`, the session type for the current mode and the `User` model.
pub fn imports(idiom: &IdiomSet) -> Fragment {
    Fragment::empty()
        .import("app.db.database", "get_db")
        .import(idiom.session_module, idiom.session_type)
        .import("app.models.auth", "User")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_shape_in_both_modes() {
        let sync = imports(&IdiomSet::SYNC);
        let asynch = imports(&IdiomSet::ASYNC);

        assert_eq!(sync.imports.len(), asynch.imports.len());
        assert!(sync.imports.has_symbol("sqlalchemy.orm", "Session"));
        assert!(asynch.imports.has_symbol("sqlalchemy.ext.asyncio", "AsyncSession"));
        assert!(!asynch.imports.has_module("sqlalchemy.orm"));
    }
}
