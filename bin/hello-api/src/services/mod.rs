pub mod greeting;

pub use greeting::GreetingRepository;
