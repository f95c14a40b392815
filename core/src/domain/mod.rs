//! Domain entities mirrored from the BondiHub backend
//!
//! Plain records with server-authoritative lifecycles. The client holds
//! ephemeral, invalidatable copies; nothing here enforces invariants
//! beyond what the wire format requires.

pub mod admin;
pub mod favorite;
pub mod house;
pub mod maintenance;
pub mod notification;
pub mod payment;
pub mod rental;
pub mod review;
pub mod user;

pub use admin::{AdminDashboard, AdminUserFilters, AdminUserListResponse, ReportQuery, UpdateUserStatusRequest};
pub use favorite::{Favorite, FavoriteListResponse};
pub use house::{
    CreateHouseRequest, House, HouseFilters, HouseImage, HouseListResponse, HouseStatus, HouseType,
    UpdateHouseRequest,
};
pub use maintenance::{
    CreateMaintenanceRequest, MaintenanceFilters, MaintenanceListResponse, MaintenanceRequest,
    MaintenanceStats, MaintenanceStatus, UpdateMaintenanceRequest,
};
pub use notification::{
    Notification, NotificationFilters, NotificationListResponse, NotificationStats,
    NotificationType,
};
pub use payment::{
    CreatePaymentRequest, Payment, PaymentFilters, PaymentListResponse, PaymentMethod,
    PaymentReceipt, PaymentResult, PaymentStats, PaymentStatus,
};
pub use rental::{
    AgreementStatus, CreateRentalAgreementRequest, RentalAgreement, RentalAgreementFilters,
    RentalAgreementListResponse, UpdateRentalAgreementRequest,
};
pub use review::{
    CreateReviewRequest, RatingDistribution, Review, ReviewFilters, ReviewListResponse,
    UpdateReviewRequest,
};
pub use user::{
    AuthResponse, ChangePasswordRequest, LoginRequest, RegisterRequest, Role, SubscriptionPlan,
    UpdateProfileRequest, User,
};
