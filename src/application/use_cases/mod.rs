//! Use cases - Application business operations

pub mod register_user;
pub mod describe_rules;
pub mod health_check;

pub use register_user::RegisterUserUseCase;
pub use describe_rules::DescribeRulesUseCase;
pub use health_check::HealthCheckUseCase;
