pub mod predict_response;
