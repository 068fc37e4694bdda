//! Server-rendered markup for every page

pub mod authors;
pub mod book_instances;
pub mod books;
pub mod genres;
pub mod home;
pub mod layout;
