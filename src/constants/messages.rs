//! Success message constants used throughout the application.

// Authentication messages
pub const MSG_LOGIN_SUCCESS: &str = "Login successful";
pub const MSG_USER_REGISTERED: &str = "User registered successfully. Please confirm your email.";

// Confirmation messages
pub const MSG_ALREADY_CONFIRMED: &str = "Account already confirmed. Please login.";
pub const MSG_ACCOUNT_CONFIRMED: &str = "You have confirmed your account. Thanks!";

// Category messages
pub const MSG_CATEGORY_CREATED: &str = "Category created successfully";
pub const MSG_CATEGORY_FOUND: &str = "Category found";
pub const MSG_CATEGORY_UPDATED: &str = "Category updated successfully";

// Product messages
pub const MSG_PRODUCT_CREATED: &str = "Product created successfully";
pub const MSG_PRODUCT_FOUND: &str = "Product found";
pub const MSG_PRODUCT_UPDATED: &str = "Product updated successfully";

// User messages
pub const MSG_USER_FOUND: &str = "User found";

// Upload messages
pub const MSG_IMAGE_UPLOADED: &str = "Image uploaded successfully";
pub const MSG_AVATAR_UPLOADED: &str = "Avatar uploaded successfully";
