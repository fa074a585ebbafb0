/*!
# Values and Literals

Every expression produces one of two types of value: a number or a
string. Numbers are 64-bit floating point. Strings are sequences of
bytes; they are not limited to ASCII but the upper and lower case
functions only change ASCII letters.

Mixing the types is a `TYPE MISMATCH`, with one exception: `+` joins two
strings together.

```text
"BBC"+" Micro"    BBC Micro
"BBC"+1           TYPE MISMATCH
```

## Numeric literals

```text
1234      decimal
1.5e3     decimal with exponent, 1500
.5        a leading point is fine
&FFEE     hexadecimal
$FFEE     hexadecimal, the other way
%1010     binary, 10
&FFFF_FFFF underscores separate digits
```

Hexadecimal and binary literals may not exceed 32 bits;
`&100000000` is `NUMBER TOO BIG`.

## Other values

```text
'A'       the character code of A, 65
"text"    a string, write "" for one quote inside it
*         the program counter
TIME$     when assembly started, as Sun,04 Mar 2012.12:05:06
```

## Symbols

A symbol name starts with a letter or underscore and continues with
letters, digits and underscores. A trailing `$` is part of the name.
Symbol names are case sensitive; operator and function names are not,
so `sin(0)` and `SIN(0)` are the same.

## Truth

Comparisons produce -1 for true and 0 for false, so `AND`, `OR` and `EOR`
combine them as bit masks the way BBC BASIC does.

```text
1<2       -1
1<2 AND 2<1   0
"A"<"B"   -1
```

## Integers

The bitwise operators, shifts, `DIV`, `MOD` and a few functions work on
32-bit integers. A number is converted by truncating towards zero.
Anything from -2147483648 to 4294967295 fits, values above 2147483647
keeping their bit pattern. Outside that range it is `OUT OF INTEGER RANGE`.

*/
