pub mod a001_store;
pub mod a002_staff;
pub mod a003_member;
pub mod a004_recharge;
pub mod a005_consume;
pub mod a006_room;
pub mod a007_reservation;
pub mod common;
