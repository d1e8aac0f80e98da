//! Single-administrator capability check.
//!
//! Every privileged entry point passes its caller through `require_admin`
//! before touching state, so a rejected call has nothing to roll back.
use soroban_sdk::{Address, Env};

use crate::error::Error;
use crate::storage;

/// Verify that `caller` is the stored admin and has signed the invocation.
pub fn require_admin(env: &Env, caller: &Address) -> Result<(), Error> {
    let admin = storage::get_admin(env)?;
    caller.require_auth();
    if caller != &admin {
        return Err(Error::Unauthorized);
    }
    Ok(())
}
