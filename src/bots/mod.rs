pub mod greedy;
pub mod human;
pub mod random;
pub mod registry;

pub use greedy::GreedyBot;
pub use human::HumanBot;
pub use random::RandomBot;
