pub static BUCKET_NAME: &str = "BUCKET_NAME";
pub static QUEUE_NAME: &str = "QUEUE_NAME";
