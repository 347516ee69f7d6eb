mod panic;
mod token;

#[cfg_attr(not(loom), allow(unused_imports))]
pub(super) use self::{base::*, panic::*, threads::*, token::*};
