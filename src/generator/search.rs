use super::jsx::{line, write_component_close, write_component_open, write_imports};
use crate::pattern::Pattern;

const COMPONENT: &str = Pattern::Search.component_name();

const IMPORTS: &[&str] = &["Input", "Label", "Card"];

/// Example entries the generated component filters as the user types.
const EXAMPLE_SUGGESTIONS: &[&str] = &[
    "Dashboard",
    "Documents",
    "Downloads",
    "Notifications",
    "Profile",
    "Settings",
];

const BODY: &str = r#"  const [query, setQuery] = useState('');
  const [isOpen, setIsOpen] = useState(false);

  const matches = query.trim()
    ? SUGGESTIONS.filter(item =>
        item.toLowerCase().includes(query.trim().toLowerCase())
      )
    : [];

  const handleChange = (e) => {
    setQuery(e.target.value);
    setIsOpen(true);
  };

  const handleSelect = (item) => {
    setQuery(item);
    setIsOpen(false);
    console.log('Selected:', item);
  };

  return (
    <div className="relative max-w-md mx-auto">
      <Label htmlFor="search">Search</Label>
      <Input
        id="search"
        name="search"
        type="search"
        value={query}
        onChange={handleChange}
        onFocus={() => setIsOpen(true)}
        autoComplete="off"
        role="combobox"
        aria-expanded={isOpen && matches.length > 0}
        aria-controls="search-suggestions"
      />
      {isOpen && matches.length > 0 && (
        <Card className="absolute w-full mt-1 z-10">
          <ul id="search-suggestions" role="listbox">
            {matches.map(item => (
              <li
                key={item}
                role="option"
                className="px-3 py-2 cursor-pointer hover:bg-gray-100"
                onMouseDown={() => handleSelect(item)}
              >
                {item}
              </li>
            ))}
          </ul>
        </Card>
      )}
    </div>
  );
"#;

/// Search input with a static suggestion list and client-side substring filtering.
pub fn generate_search_bar() -> String {
    let mut out = String::with_capacity(2048);
    write_imports(&mut out, IMPORTS);

    let quoted: Vec<String> = EXAMPLE_SUGGESTIONS
        .iter()
        .map(|s| format!("'{}'", s))
        .collect();
    line(&mut out, 0, &format!("const SUGGESTIONS = [{}];", quoted.join(", ")));
    line(&mut out, 0, "");

    write_component_open(&mut out, COMPONENT);
    out.push_str(BODY);
    write_component_close(&mut out, COMPONENT);
    out
}
