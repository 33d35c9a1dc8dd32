pub mod driveev;
