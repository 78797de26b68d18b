pub mod sentiment_service;
