pub mod vector2;
pub mod vector3;
