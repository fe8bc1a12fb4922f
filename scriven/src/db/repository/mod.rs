mod users;

pub use users::UserRepository;
