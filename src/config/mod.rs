/*
* Configuration: environment variables and the shared app state.
*/

pub mod environment;
pub mod state;
