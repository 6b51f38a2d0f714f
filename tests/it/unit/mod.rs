//! Unit tests for tabledeck.

mod message_tests;
