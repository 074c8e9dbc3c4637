//! Title Adapter - 书名建议实现

mod mock_title_suggester;

pub use mock_title_suggester::{MockTitleSuggester, MockTitleSuggesterConfig};
