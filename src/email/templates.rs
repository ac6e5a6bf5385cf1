pub fn render_password_reset(reset_url: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head><meta charset="utf-8"></head>
<body style="font-family: sans-serif; max-width: 600px; margin: 0 auto; padding: 20px;">
    <h2>Password Reset</h2>
    <p>You are receiving this because you (or someone else) have requested the reset of the password for your account.</p>
    <p><a href="{reset_url}" style="display: inline-block; padding: 10px 20px; background: #0070f3; color: white; text-decoration: none; border-radius: 4px;">Reset Password</a></p>
    <p>Or paste this link into your browser: {reset_url}</p>
    <p style="color: #666; font-size: 14px;">This link expires in 1 hour. If you did not request this, please ignore this email and your password will remain unchanged.</p>
</body>
</html>"#
    )
}
