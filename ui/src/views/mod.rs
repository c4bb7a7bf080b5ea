mod page;
pub use page::PageView;

mod signed_out;
pub use signed_out::SignedOut;

mod workspace;
pub use workspace::Workspace;
