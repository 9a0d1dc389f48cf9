//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. `find_by_id` and `update`
//! return `None` for a missing row; `delete` returns whether a row went.

pub mod activity_partner_repo;
pub mod activity_repo;
pub mod annual_remuneration_repo;
pub mod budget_heading_repo;
pub mod contract_repo;
pub mod objective_repo;
pub mod partner_repo;
pub mod project_repo;
pub mod resource_repo;
pub mod role_repo;
pub mod session_repo;
pub mod specific_resource_repo;
pub mod talent_task_repo;
pub mod task_repo;
pub mod task_schedule_repo;
pub mod two_factor_repo;
pub mod user_repo;
pub mod value_chain_repo;

pub use activity_partner_repo::ActivityPartnerRepo;
pub use activity_repo::ActivityRepo;
pub use annual_remuneration_repo::AnnualRemunerationRepo;
pub use budget_heading_repo::BudgetHeadingRepo;
pub use contract_repo::ContractRepo;
pub use objective_repo::ObjectiveRepo;
pub use partner_repo::PartnerRepo;
pub use project_repo::ProjectRepo;
pub use resource_repo::ResourceRepo;
pub use role_repo::RoleRepo;
pub use session_repo::SessionRepo;
pub use specific_resource_repo::SpecificResourceRepo;
pub use talent_task_repo::TalentTaskRepo;
pub use task_repo::TaskRepo;
pub use task_schedule_repo::TaskScheduleRepo;
pub use two_factor_repo::TwoFactorRepo;
pub use user_repo::UserRepo;
pub use value_chain_repo::ValueChainRepo;
