//! Built-in sensitive-field vocabulary.
//!
//! These tables seed a [`Redactor`](super::Redactor) at construction time.
//! Entries are written in their common wire spellings; they are normalized
//! before being stored, so `"cardNumber"` here also matches `"card_number"`,
//! `"Card-Number"`, and every other separator/case variant.

/// Field names redacted by default. Roughly eighty entries spanning
/// authentication material, payment-card data, bank and account
/// identifiers, and personally identifiable information.
pub const DEFAULT_SENSITIVE_KEYS: &[&str] = &[
    // Authentication and secrets
    "password",
    "passwd",
    "pwd",
    "passphrase",
    "secret",
    "clientSecret",
    "apiKey",
    "apiSecret",
    "token",
    "accessToken",
    "refreshToken",
    "idToken",
    "authToken",
    "authorization",
    "proxyAuthorization",
    "bearer",
    "cookie",
    "setCookie",
    "session",
    "sessionId",
    "sessionToken",
    "csrfToken",
    "xsrfToken",
    "privateKey",
    "encryptionKey",
    "signingKey",
    "signature",
    "credential",
    "credentials",
    "otp",
    "oneTimePassword",
    "mfaCode",
    "verificationCode",
    "recoveryCode",
    // Payment card
    "cardNumber",
    "cardNo",
    "pan",
    "maskedPan",
    "cardHolder",
    "cardHolderName",
    "nameOnCard",
    "expiry",
    "expiryDate",
    "expirationDate",
    "expiryMonth",
    "expiryYear",
    "cvv",
    "cvv2",
    "cvc",
    "cvc2",
    "cid",
    "securityCode",
    "cardVerificationCode",
    "cardVerificationValue",
    "pin",
    "pinCode",
    "pinBlock",
    "track1",
    "track2",
    "cardToken",
    // Bank and account identifiers
    "accountNumber",
    "accountNo",
    "bankAccount",
    "bankAccountNumber",
    "iban",
    "bic",
    "swift",
    "swiftCode",
    "routingNumber",
    "sortCode",
    "clabe",
    // Personally identifiable information
    "email",
    "emailAddress",
    "phone",
    "phoneNumber",
    "mobile",
    "mobileNumber",
    "address",
    "ssn",
    "socialSecurity",
    "socialSecurityNumber",
    "nationalId",
    "passport",
    "passportNumber",
    "driverLicense",
    "driversLicense",
    "dateOfBirth",
    "dob",
    "taxId",
];

/// Fields whose values must never appear in output in any form, not even
/// masked. Entries here are dropped from their containing mapping.
pub const REMOVE_ENTIRELY_KEYS: &[&str] = &[
    "cvv",
    "cvv2",
    "cvc",
    "cvc2",
    "cid",
    "securityCode",
    "cardVerificationCode",
    "cardVerificationValue",
    "pin",
    "pinCode",
    "pinBlock",
];

/// Numeric-identifier fields that reveal only their last four digits.
pub const PARTIAL_REVEAL_KEYS: &[&str] = &[
    "cardNumber",
    "cardNo",
    "pan",
    "cardToken",
    "accountNumber",
    "accountNo",
    "bankAccount",
    "bankAccountNumber",
    "iban",
    "routingNumber",
    "sortCode",
    "clabe",
];
