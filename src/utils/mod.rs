/*
    * Cross-cutting helpers: global error mapping, the error envelope
    * middleware and JSON formatting.
*/

pub mod error_handler;
pub mod formatting;
pub mod response_handler;
