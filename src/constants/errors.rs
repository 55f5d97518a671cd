//! Error message constants used throughout the application.

// Authentication errors
pub const ERR_AUTH_REQUIRED: &str = "Authentication required";
pub const ERR_INVALID_AUTH_HEADER: &str = "Missing or invalid authorization header";
pub const ERR_INVALID_TOKEN: &str = "Invalid or expired token";
pub const ERR_INVALID_CREDENTIALS: &str = "Invalid email or password";
pub const ERR_ACCOUNT_NOT_CONFIRMED: &str =
    "Account is not confirmed. Please follow the confirmation link first.";

// Confirmation errors
pub const ERR_CONFIRM_TOKEN_INVALID: &str = "The confirmation link is invalid or has expired.";

// Category errors
pub const ERR_CATEGORY_NOT_FOUND: &str = "Category not found";
pub const ERR_CATEGORY_EXISTS: &str = "A category with the same name already exists";
pub const ERR_CATEGORY_IN_USE: &str = "Category still has products and cannot be deleted";
pub const ERR_INVALID_CATEGORY_ID: &str = "Invalid category ID format";

// Product errors
pub const ERR_PRODUCT_NOT_FOUND: &str = "Product not found";
pub const ERR_PRODUCT_EXISTS: &str = "A product with the same name already exists";
pub const ERR_INVALID_PRODUCT_ID: &str = "Invalid product ID format";

// User errors
pub const ERR_USER_NOT_FOUND: &str = "User not found";
pub const ERR_INVALID_USER_ID: &str = "Invalid user ID format";
pub const ERR_EMAIL_EXISTS: &str = "Email already registered";
pub const ERR_USERNAME_EXISTS: &str = "A user with the same name already exists";
pub const ERR_WEAK_PASSWORD: &str =
    "Password must contain at least one uppercase, lowercase, digit, and special character";

// Pagination errors
pub const ERR_INVALID_PAGE: &str = "Page number must be 1 or greater";
pub const ERR_PAGE_OUT_OF_RANGE: &str = "Requested page is beyond the last page";

// Upload errors
pub const ERR_INVALID_FILE_TYPE: &str =
    "Invalid file type. Only JPEG, PNG, GIF, and WebP are allowed.";
pub const ERR_FILE_TOO_LARGE: &str = "File too large. Maximum size is 5MB.";
pub const ERR_NO_UPLOAD_FILE: &str = "No file provided in the expected multipart field";
pub const ERR_FAILED_PROCESS_UPLOAD: &str = "Failed to process upload";
pub const ERR_FAILED_READ_FILE: &str = "Failed to read file data";
pub const ERR_FAILED_SAVE_FILE: &str = "Failed to save file";
pub const ERR_INVALID_FILENAME: &str = "Invalid file name";
pub const ERR_IMAGE_NOT_FOUND: &str = "Image not found";
pub const ERR_AVATAR_NOT_FOUND: &str = "User has no avatar";

// Generic errors
pub const ERR_FAILED_FETCH_UPDATED: &str = "Failed to fetch updated document";
