pub mod prediction_request;
pub mod verdict;
