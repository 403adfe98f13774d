//! National team infrastructure implementations

mod mapper;
mod repository;
mod service;

pub use mapper::NationalTeamMapper;
pub use repository::StorageNationalTeamRepository;
pub use service::NationalTeamService;
