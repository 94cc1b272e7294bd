use super::jsx::{line, write_component_close, write_component_open};
use crate::pattern::Pattern;

const COMPONENT: &str = Pattern::Profile.component_name();

const BODY: &str = r#"  const user = {
    name: 'Jane Doe',
    role: 'Product Designer',
    avatarUrl: 'https://via.placeholder.com/96',
  };

  const handleEdit = () => {
    console.log('Edit profile:', user.name);
  };

  return (
    <Card className="max-w-sm mx-auto p-6 text-center">
      <img
        src={user.avatarUrl}
        alt={`${user.name} avatar`}
        className="w-24 h-24 rounded-full mx-auto mb-4"
      />
      <Heading level={2} className="text-lg">
        {user.name}
      </Heading>
      <p className="text-sm text-gray-600 mb-4">{user.role}</p>
      <Button variant="secondary" onClick={handleEdit}>
        Edit Profile
      </Button>
    </Card>
  );
"#;

/// Static profile card with placeholder avatar, name, role and an edit button.
pub fn generate_profile_card() -> String {
    let mut out = String::with_capacity(1024);
    // No local state, so only React itself is imported.
    line(&mut out, 0, "import React from 'react';");
    line(&mut out, 0, "import { Card, Heading, Button } from '@visa/nova-react';");
    line(&mut out, 0, "");
    write_component_open(&mut out, COMPONENT);
    out.push_str(BODY);
    write_component_close(&mut out, COMPONENT);
    out
}
