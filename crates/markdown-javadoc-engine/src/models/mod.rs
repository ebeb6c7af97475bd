pub mod candidate_file;
pub mod comment_block;

pub use candidate_file::CandidateFile;
pub use comment_block::CommentBlock;
