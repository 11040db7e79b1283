mod brand;
mod campaign;
mod category;
mod mou;
mod notification;
mod platform;
mod platform_account;
mod user;
