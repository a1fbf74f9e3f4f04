//! Fragment producers.
//!
//! Each producer is a pure function of the configuration that returns a
//! [`Fragment`](crate::Fragment): the imports it needs and the top-level
//! definitions it contributes. Files merge fragments in a fixed order.

pub mod auth;
pub mod base;
pub mod database;
pub mod project;

use crate::Fragment;

/// `from fastapi import APIRouter, Depends, HTTPException, status`
pub fn fastapi() -> Fragment {
    Fragment::empty()
        .import("fastapi", "APIRouter")
        .import("fastapi", "Depends")
        .import("fastapi", "HTTPException")
        .import("fastapi", "status")
}

/// Module-level router every endpoint module declares.
pub const ROUTER_STATEMENT: &str = "router = APIRouter()";
