pub mod progress;
pub mod request_box;
pub mod response_box;
pub mod spinner;
