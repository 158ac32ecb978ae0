pub mod track_repo;

pub use track_repo::TrackRepo;
