//! Book management service

use crate::{
    error::AppResult,
    models::{
        author::Author,
        book::{Book, BookListRow, NewBook},
        book_instance::BookInstance,
        genre::Genre,
    },
    repository::Repository,
};

/// A book with all of its references resolved, for the detail page
pub struct BookDetails {
    pub book: Book,
    pub author: Option<Author>,
    pub genres: Vec<Genre>,
    pub copies: Vec<BookInstance>,
}

/// Everything the book form needs to render its select and checkbox inputs
pub struct BookFormContext {
    pub authors: Vec<Author>,
    pub genres: Vec<Genre>,
}

/// Outcome of a book delete request; blocked while copies exist
pub enum BookDelete {
    Deleted,
    HasCopies(BookDetails),
}

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
}

impl BooksService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<BookListRow>> {
        self.repository.books.list().await
    }

    /// Book with author, genres and copies resolved
    pub async fn detail(&self, id: i32) -> AppResult<BookDetails> {
        let book = self.repository.books.get(id).await?;
        let author = self.repository.authors.get(book.author_id).await.ok();
        let genres = self.repository.books.genres_of(id).await?;
        let copies = self.repository.book_instances.for_book(id).await?;

        Ok(BookDetails {
            book,
            author,
            genres,
            copies,
        })
    }

    /// Authors and genres for populating the create/update form
    pub async fn form_context(&self) -> AppResult<BookFormContext> {
        Ok(BookFormContext {
            authors: self.repository.authors.list().await?,
            genres: self.repository.genres.list().await?,
        })
    }

    /// A book with its current genre references, for the update form
    pub async fn get_with_genres(&self, id: i32) -> AppResult<(Book, Vec<Genre>)> {
        let book = self.repository.books.get(id).await?;
        let genres = self.repository.books.genres_of(id).await?;
        Ok((book, genres))
    }

    pub async fn create(&self, book: &NewBook) -> AppResult<Book> {
        let created = self.repository.books.create(book).await?;
        tracing::info!("Created book id={} ({})", created.id, created.title);
        Ok(created)
    }

    pub async fn update(&self, id: i32, book: &NewBook) -> AppResult<Book> {
        self.repository.books.update(id, book).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<BookDelete> {
        let details = self.detail(id).await?;

        if !details.copies.is_empty() {
            return Ok(BookDelete::HasCopies(details));
        }

        self.repository.books.delete(id).await?;
        tracing::info!("Deleted book id={}", id);
        Ok(BookDelete::Deleted)
    }
}
