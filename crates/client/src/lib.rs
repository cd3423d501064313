pub use {backend::*, credentials::*, promote::*};

pub use http::*;

pub mod backend;
pub mod credentials;
mod http;
pub mod promote;
mod token;

#[test]
fn it_compiles() {
    //
}
