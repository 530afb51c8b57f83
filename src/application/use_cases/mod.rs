/// Use cases module containing application business logic orchestration
mod audit_release_dates;

pub use audit_release_dates::AuditReleaseDatesUseCase;
