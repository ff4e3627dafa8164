mod card_repo;

pub use card_repo::CardRepo;
