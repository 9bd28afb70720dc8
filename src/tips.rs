//! Static password guidance shown by the tips menu entry.
//!
//! Process-wide constant data with no lifecycle; nothing here is
//! computed from the scorer.

/// Numbered suggestions for creating strong passwords.
pub const SUGGESTIONS: [&str; 7] = [
    "1. Use at least 12 characters (longer is better)",
    "2. Mix uppercase and lowercase letters",
    "3. Include numbers (0-9)",
    "4. Add special characters (!@#$%^&*)",
    "5. Avoid common words or personal information",
    "6. Don't use sequential patterns (123, abc)",
    "7. Consider using a passphrase (e.g., 'Coffee@Morning#2024!')",
];

/// Examples of strong passwords, numbered at print time.
pub const STRONG_EXAMPLES: [&str; 4] = [
    "MyDog@2024Runs!Fast",
    "Coffee#Morning$2024",
    "Tr@vel&Learn*2024!",
    "B!cycle#Ride$Sun123",
];

/// Password shapes to avoid.
pub const AVOID: [&str; 5] = [
    "✗ Password123",
    "✗ qwerty",
    "✗ 123456",
    "✗ YourName123",
    "✗ birthday dates",
];
