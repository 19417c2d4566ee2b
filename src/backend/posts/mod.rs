//! Posts
//!
//! Feed pages, post detail, the post form with image uploads, comments and
//! follow edges.

pub mod form;

pub mod handlers;

pub mod media;
