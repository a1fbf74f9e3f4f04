//! Sync/async database idioms.
//!
//! Sync and async output have identical shape; they differ only in the
//! session type and whether data-access calls are awaited.

/// The token set substituted into database-touching templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdiomSet {
    /// Module the session type is imported from.
    pub session_module: &'static str,
    /// Session type used in `db: ... = Depends(get_db)` annotations.
    pub session_type: &'static str,
    /// Prefix for data-access calls: empty or `"await "`.
    pub await_kw: &'static str,
}

impl IdiomSet {
    /// SQLAlchemy ORM `Session`, blocking calls.
    pub const SYNC: IdiomSet = IdiomSet {
        session_module: "sqlalchemy.orm",
        session_type: "Session",
        await_kw: "",
    };

    /// SQLAlchemy `AsyncSession`, awaited calls.
    pub const ASYNC: IdiomSet = IdiomSet {
        session_module: "sqlalchemy.ext.asyncio",
        session_type: "AsyncSession",
        await_kw: "await ",
    };

    pub fn for_mode(is_async: bool) -> Self {
        if is_async { Self::ASYNC } else { Self::SYNC }
    }

    /// Prefix a data-access call with `await` when async.
    pub fn call(&self, expr: &str) -> String {
        format!("{}{}", self.await_kw, expr)
    }

    /// The `db` dependency parameter annotation.
    pub fn db_param(&self) -> crate::ast::Param {
        crate::ast::Param::typed("db", self.session_type).default("Depends(get_db)")
    }
}
