mod chatbox;

pub use chatbox::ChatBox;
